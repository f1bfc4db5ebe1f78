/// Split the comma-separated actor field of the form into names.
/// Empty segments are kept, so `"A,,B"` yields three entries.
pub fn split_actors(text: &str) -> Vec<String> {
    text.split(',').map(|actor| actor.trim().to_string()).collect()
}

pub fn join_actors(actors: &[String]) -> String {
    actors.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_actors() {
        assert_eq!(split_actors("A, B, C"), vec!["A", "B", "C"]);
        assert_eq!(split_actors("A,B"), vec!["A", "B"]);
        assert_eq!(split_actors("  Keanu Reeves "), vec!["Keanu Reeves"]);
        assert_eq!(split_actors("A,,B"), vec!["A", "", "B"]);
    }

    #[test]
    fn test_split_join_roundtrip() {
        let actors = split_actors("A, B, C");
        assert_eq!(join_actors(&actors), "A, B, C");
        assert_eq!(split_actors(&join_actors(&actors)), actors);
    }
}
