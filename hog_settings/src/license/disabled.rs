// Copyright 2023-2025 ReductSoftware UG
// Licensed under the Business Source License 1.1

use crate::license::{License, ManageLicenses};
use hog_base::error::HogError;
use hog_base::not_implemented;

/// A repository for builds without licensing
pub(super) struct NoLicenseRepository {}

impl NoLicenseRepository {
    pub fn new() -> Self {
        Self {}
    }
}

impl ManageLicenses for NoLicenseRepository {
    fn first_valid(&self) -> Result<Option<License>, HogError> {
        Err(not_implemented!("Licensing is not available in this build"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hog_base::error::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn test_first_valid() {
        let repo = NoLicenseRepository::new();
        assert_matches!(
            repo.first_valid(),
            Err(HogError {
                status: ErrorCode::NotImplemented,
                ..
            })
        );
    }
}
