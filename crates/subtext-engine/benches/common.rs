// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_subtext_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content and a /slash/link in it.\n\n- List item with https://example.com/path?q=1\n- Another item\n> A quoted line\n   \n";
    base.repeat(size)
}

/// Splits `content` into chunks of about `size` bytes on char boundaries.
#[allow(dead_code)]
pub fn chunked(content: &str, size: usize) -> Vec<&str> {
    let mut chunks = vec![];
    let mut rest = content;
    while !rest.is_empty() {
        let mut end = size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
