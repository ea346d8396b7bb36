/// Build a separator line by repeating `c` `width` times.
pub fn banner(c: char, width: usize) -> String {
    c.to_string().repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_repeats_character() {
        assert_eq!(banner('=', 5), "=====");
        assert_eq!(banner('-', 1), "-");
    }

    #[test]
    fn banner_zero_width() {
        assert_eq!(banner('=', 0), "");
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
