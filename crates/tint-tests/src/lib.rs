//! Integration tests for tint crates.
//!
//! End-to-end checks across decode, pipeline and encode.

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tint_core::{Pixel, PixelBuffer};
    use tint_ops::filter::{dim, freeze, sepia};
    use tint_ops::{FilterKind, Preset, Selections, apply_explicit, apply_named};

    fn photo() -> PixelBuffer {
        let (w, h) = (24u32, 16u32);
        let data: Vec<u8> = (0..w * h)
            .flat_map(|i| {
                let x = i % w;
                let y = i / w;
                [(x * 10) as u8, (y * 15) as u8, ((x + y) * 5) as u8, (255 - i % 200) as u8]
            })
            .collect();
        PixelBuffer::from_rgba_bytes(w, h, &data).unwrap()
    }

    /// Identity pipeline: encode -> decode reproduces the source bytes.
    #[test]
    fn test_identity_roundtrip_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("identity.png");
        let src = photo();

        let out = apply_named::<&str>(Some(src.clone()), &[]).unwrap();
        tint_io::write(&path, &out).expect("Failed to write PNG");
        let loaded = tint_io::read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.dimensions(), src.dimensions());
        assert_eq!(loaded.to_rgba_bytes(), src.to_rgba_bytes());
    }

    /// Load -> named pipeline -> save -> reload.
    #[test]
    fn test_named_pipeline_through_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let src = photo();
        tint_io::write(&input, &src).unwrap();

        let result = apply_named(tint_io::load(&input), &["Freeze Filter", "Dim Filter"]).unwrap();
        tint_io::write(&output, &result).unwrap();

        let reloaded = tint_io::read(&output).unwrap();
        assert_eq!(reloaded, dim(&freeze(&src, 1.0), 1.0));
        for (a, b) in src.pixels().iter().zip(reloaded.pixels()) {
            assert_eq!(a.alpha(), b.alpha());
        }
    }

    /// A source that fails to decode yields no output from either mode.
    #[test]
    fn test_undecodable_source_propagates_absence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(apply_named(tint_io::load(&path), &["Sepia Filter"]).is_none());
        let sel = Selections::none().select(FilterKind::Sepia, 1.0);
        assert!(apply_explicit(tint_io::load(&path), &sel).is_none());
    }

    #[test]
    fn test_explicit_matches_named_in_canonical_order() {
        let src = photo();
        let sel = Selections::none()
            .select(FilterKind::Dim, 1.0)
            .select(FilterKind::Freeze, 1.0);
        let explicit = apply_explicit(Some(src.clone()), &sel).unwrap();
        let named = apply_named(Some(src), &["Freeze Filter", "Dim Filter"]).unwrap();
        assert_eq!(explicit, named);
    }

    #[test]
    fn test_preset_through_bytes() {
        let preset = Preset::from_yaml("steps:\n  - filter: Sepia Filter\n    strength: 0.5\n").unwrap();
        let src = photo();
        let bytes = tint_io::encode(&src).unwrap();
        let out = preset
            .apply(&tint_ops::FilterPipeline::new(), tint_io::decode(&bytes).ok())
            .unwrap();
        assert_eq!(out, sepia(&src, 0.5));
    }

    #[test]
    fn test_every_filter_keeps_dimensions() {
        let src = PixelBuffer::filled(7, 3, Pixel::new(9, 99, 199, 42));
        for kind in FilterKind::ALL {
            let out = apply_named(Some(src.clone()), &[kind.name()]).unwrap();
            assert_eq!(out.dimensions(), (7, 3), "{kind}");
            assert!(out.pixels().iter().all(|p| p.alpha() == 42), "{kind}");
        }
    }
}
