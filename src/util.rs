/// Finds the length of the common prefix between a word and an edge chunk.
///
/// Returns the number of leading symbols that are equal in both slices.
pub fn prefix_match<S: PartialEq>(word: &[S], chunk: &[S]) -> usize {
    word.iter()
        .zip(chunk)
        .take_while(|(a, b)| a == b)
        .count()
}
