#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skip inventory lines whose host pattern cannot be expanded instead of
    /// aborting the build.
    pub skip_bad_patterns: bool,

    /// Skip `key=value` tokens that carry no `=` instead of aborting the build.
    pub skip_bad_assignments: bool,

    /// Treat `:children` / `:vars` sections that reference an unknown group
    /// as a warning.
    pub allow_undefined_groups: bool,

    /// Fact-cache layout: nest each fact document under this field.
    pub fact_cache_key: Option<String>,

    /// Keep only hosts whose name or one of whose groups matches an entry.
    /// Entries may use host patterns. Empty means no filtering.
    pub limit: Vec<String>,

    pub quiet: u8,
}
