use std::ops::AddAssign;

/// Numbers of rays traced, gathered per worker and summed afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayStats {
    pub primary: u64,
    pub reflection: u64,
    pub shadow: u64,
}

impl RayStats {
    pub fn total(&self) -> u64 {
        self.primary + self.reflection + self.shadow
    }
}

impl AddAssign for RayStats {
    fn add_assign(&mut self, rhs: RayStats) {
        self.primary += rhs.primary;
        self.reflection += rhs.reflection;
        self.shadow += rhs.shadow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_per_kind_and_in_total() {
        let mut stats = RayStats {
            primary: 4,
            reflection: 2,
            shadow: 7,
        };
        stats += RayStats {
            primary: 1,
            reflection: 0,
            shadow: 3,
        };
        assert_eq!(stats.primary, 5);
        assert_eq!(stats.shadow, 10);
        assert_eq!(stats.total(), 17);
    }
}
