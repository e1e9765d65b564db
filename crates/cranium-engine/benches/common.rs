// Shared by several bench targets; each only uses some of these.
#![allow(dead_code)]

/// One block of every construct the parser knows, repeated `repeats` times.
pub fn generate_markdown_content(repeats: usize) -> String {
    let unit = "# Title\n\n## Section\n\nPlain text with *emphasis*, **strong**, ***both*** and a [link](https://example.com).\n\n- bullet\n  - nested bullet\n- another bullet\n\n> quoted\n> > deeper quote\n> - list in a quote\n\n1. first\n2. second\n\n```\nlet raw = \"*not emphasis*\";\n```\n\n![image](pic.png) with an escaped \\* star\n\n";
    unit.repeat(repeats)
}

/// `sections` top-level headings, each followed by a ladder of lists and
/// quotes `depth` levels deep.
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        for level in 0..depth {
            let indent = "  ".repeat(level);
            let quotes = "> ".repeat(level);
            let heading = "#".repeat((level + 2).min(6));
            content.push_str(&format!("{heading} Level {level}\n"));
            content.push_str(&format!("{indent}- item _{level}_ of {section}\n"));
            content.push_str(&format!("{indent}{}. ordered [ref](#s{section})\n", level + 1));
            content.push_str(&format!("{quotes}quoted **text** at {level}\n"));
        }
        if section % 3 == 0 {
            content.push_str("```\nfn in_fence() {}\n```\n");
        }
        content.push('\n');
    }
    content
}

pub fn generate_large_document() -> String {
    generate_complex_markdown(200, 5)
}
