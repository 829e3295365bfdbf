pub mod branch_name;
pub mod outcome;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name the `HEAD` file uses; never allowed as a branch name
pub const HEAD_NAME: &str = "HEAD";
