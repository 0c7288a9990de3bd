// src/types/position.rs

/// Direction of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Direction implied by a signed signal; `None` when flat.
    pub fn from_signal(signal: f64) -> Option<Self> {
        if signal > 0.0 {
            Some(Side::Long)
        } else if signal < 0.0 {
            Some(Side::Short)
        } else {
            None
        }
    }

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_sign_picks_side() {
        assert_eq!(Side::from_signal(0.3), Some(Side::Long));
        assert_eq!(Side::from_signal(-0.01), Some(Side::Short));
        assert_eq!(Side::from_signal(0.0), None);
        assert_eq!(Side::Short.sign(), -1.0);
    }
}
