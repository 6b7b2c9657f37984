use crate::api::Joke;

/// Jokes whose text starts with `prefix`, in their original order.
///
/// Matching is case-sensitive. An empty prefix keeps everything.
pub fn filter_by_prefix(jokes: &[Joke], prefix: &str) -> Vec<Joke> {
    if prefix.is_empty() {
        return jokes.to_vec();
    }

    jokes
        .iter()
        .filter(|joke| joke.value.starts_with(prefix))
        .cloned()
        .collect()
}
