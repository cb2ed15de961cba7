//! Target capability predicates.

/// Capabilities of the machine the matcher will run on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetInfo {
    wide_simd: bool,
}

impl TargetInfo {
    /// Baseline target: 128-bit SIMD only.
    pub const BASELINE: Self = Self { wide_simd: false };

    pub fn new(wide_simd: bool) -> Self {
        Self { wide_simd }
    }

    /// Capabilities of the machine running this process.
    pub fn host() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self::new(std::arch::is_x86_feature_detected!("avx2"))
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Self::BASELINE
        }
    }

    /// 256-bit SIMD is available.
    pub fn has_wide_simd(&self) -> bool {
        self.wide_simd
    }
}
