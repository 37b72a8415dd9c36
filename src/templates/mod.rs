//! Platform command templates.
//!
//! Each submodule holds one implementation of `CommandTemplate` with its
//! platform-specific strings. The constants below are shared by all of them.

pub mod linux;
pub mod linux_suites;

/// First command of every job
pub const PIP_UPGRADE: &str = "sudo -H pip install --upgrade pip";

/// Python index hosting `unity-downloader-cli`
pub const DOWNLOADER_INDEX: &str =
    "https://artifactory.internal.unity3d.com/api/pypi/common-python/simple";

/// npm registry hosting `upm-ci-utils`
pub const NPM_REGISTRY: &str = "https://api.bintray.com/npm/unity/unity-npm";

/// Test runner repository, cloned into `<project>/utr`
pub const UTR_REPOSITORY: &str = "git@github.cds.internal.unity3d.com:unity/utr.git";

/// Editor revision file, relative to the project directory
pub const REVISION_FILE: &str = "../../unity_revision.txt";

/// Flags closing every `utr` invocation
pub const UTR_TRAILING_FLAGS: &str =
    "--testproject=. --editor-location=.Editor --artifacts_path=test-results";
