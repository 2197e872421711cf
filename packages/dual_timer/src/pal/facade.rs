//! Platform facade for switching between real and fake implementations.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Facade that allows switching between real and fake platform implementations.
#[derive(Debug, Clone)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation using the operating system clocks.
    Real(RealPlatform),

    /// Fake platform implementation for testing.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a new platform facade using the real implementation.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    /// Creates a new platform facade using the fake implementation.
    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn real_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.real_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.real_time(),
        }
    }

    fn cpu_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.cpu_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.cpu_time(),
        }
    }
}
