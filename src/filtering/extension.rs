// src/filtering/extension.rs

// Matched by lowercase suffix on the full file name, so dotfile entries like
// ".gitignore" match both the bare dotfile and prefixed variants.
const TEXT_FILE_EXTENSIONS: &[&str] = &[
    // --- Web markup & scripts ---
    ".js", ".jsx", ".ts", ".tsx", ".html", ".htm", ".css", ".scss", ".sass", ".less",
    // --- Structured data ---
    ".json", ".xml", ".yml", ".yaml",
    // --- Prose & tabular ---
    ".md", ".markdown", ".txt", ".rtf", ".csv",
    // --- General-purpose languages ---
    ".py", ".rb", ".java", ".c", ".cpp", ".cs", ".go", ".rs", ".php", ".pl",
    // --- Shells ---
    ".sh", ".bash", ".zsh", ".ps1",
    // --- Apple / JVM ecosystems ---
    ".swift", ".kt", ".kts", ".gradle",
    // --- Queries & schemas ---
    ".sql", ".graphql", ".prisma",
    // --- Tool configuration ---
    ".env", ".gitignore", ".eslintrc", ".prettierrc", ".babelrc", ".editorconfig",
    ".dockerignore", ".htaccess", ".ini", ".conf", ".cfg", ".toml",
    // --- Logs & separated values ---
    ".tsv", ".log",
    // --- Component frameworks ---
    ".vue", ".svelte",
    // --- Scientific & systems ---
    ".dart", ".lua", ".r", ".perl", ".m", ".h",
    // --- Server-side templates ---
    ".jsp", ".aspx", ".erb", ".haml", ".slim", ".pug", ".jade",
    // --- Elixir ---
    ".ex", ".exs",
    // --- Template engines ---
    ".hbs", ".twig", ".razor",
    // --- Functional & JVM languages ---
    ".elm", ".clj", ".scala", ".groovy",
    // --- Infrastructure & build ---
    ".tf", ".nix", ".cmake", ".make",
    // --- Assembly ---
    ".asm", ".s",
    // --- Windows batch ---
    ".bat", ".cmd",
    // --- Interface definitions & contracts ---
    ".proto", ".sol",
    // --- Haskell / Erlang / F# ---
    ".hs", ".erl", ".fs", ".fsx",
];

/// Checks if a file name carries a known text extension (case-insensitive).
pub(crate) fn has_text_extension(name: &str) -> bool {
    let lower_name = name.to_lowercase();
    TEXT_FILE_EXTENSIONS
        .iter()
        .any(|ext| lower_name.ends_with(ext))
}
