pub(crate) const USAGE_HEADER: &str = "USAGE:";
pub(crate) const ARGUMENTS_HEADER: &str = "ARGUMENTS:";
pub(crate) const OPTIONS_HEADER: &str = "OPTIONS:";
pub(crate) const ARGUMENTS_PLACEHOLDER: &str = "<ARGUMENTS>";
pub(crate) const OPTIONS_PLACEHOLDER: &str = "[OPTIONS]";

// Beyond this many required arguments (or flags), the usage line collapses them into a placeholder.
pub(crate) const INLINE_LIMIT: usize = 3;

pub(crate) const INDENT: &str = "    ";
pub(crate) const GAP: &str = "    ";
