// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with `inline code` and **bold `code`** text.\n\n> Quoted `span`\n>\n> ```sh\n> echo {{ home }}\n> ```\n\n```rust\nfn example() {\n    println!(\"{}\", 1);\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_prose(size: usize) -> String {
    "Plain paragraph text without any code at all, just words.\n\n".repeat(size)
}

#[allow(dead_code)]
pub fn generate_template_heavy(size: usize) -> String {
    "{% raw %}\n```\n{{ x }}\n```\n{% endraw %}\n\n{{ page.title }} and `{% tag %}`\n\n".repeat(size)
}
