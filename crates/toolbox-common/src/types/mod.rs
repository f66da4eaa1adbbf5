mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn size_serialization() {
        let s = Size::new(24.0, 24.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Size = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn icon_size_defaults_to_large_toolbar() {
        assert_eq!(IconSize::default(), IconSize::LargeToolbar);
        assert_eq!(IconSize::default().pixels(), 24);
        assert_eq!(IconSize::Dialog.pixels(), 48);
    }

    #[test]
    fn icon_size_serde_snake_case() {
        let json = serde_json::to_string(&IconSize::SmallToolbar).unwrap();
        assert_eq!(json, "\"small_toolbar\"");
    }
}
