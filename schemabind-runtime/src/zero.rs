//! Value-level absence for optional members.
//!
//! Optional scalars are not wrapped in `Option`; their zero value means
//! "absent" and is skipped on the wire. Wrapped members are absent when `None`.

/// A value that has a distinguished "absent" state.
pub trait Zero {
    fn is_zero(&self) -> bool;
}

/// `skip_serializing_if` helper used by generated types.
pub fn is_zero<T: Zero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

impl Zero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zero for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Zero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl<T> Zero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Zero + ?Sized> Zero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert!(is_zero(""));
        assert!(!is_zero("x"));
        assert!(is_zero(&0i64));
        assert!(is_zero(&0.0f64));
        assert!(!is_zero(&1.5f64));
        assert!(is_zero(&false));
        assert!(!is_zero(&true));
    }

    #[test]
    fn test_option_is_absent_only_when_none() {
        assert!(is_zero(&None::<String>));
        assert!(!is_zero(&Some(String::new())));
    }

    #[test]
    fn test_references() {
        let text = String::new();
        let borrowed = &text;
        assert!(is_zero(&borrowed));
    }
}
