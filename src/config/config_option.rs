/// A configuration value together with the bounds within which it may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether `value` lies within the bounds of the option.
    pub fn admits(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let option = ConfigOption {
            name: "test",
            min: 1,
            max: 4,
            value: 2,
        };

        assert!(option.admits(&1));
        assert!(option.admits(&4));
        assert!(!option.admits(&0));
        assert!(!option.admits(&5));
        assert_eq!(option.min_max(), (1, 4));
    }
}
