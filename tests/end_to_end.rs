use hero_banner::heroes::builtin_heroes;
use hero_banner::{HeroRenderer, RenderConfig};
use image::GenericImageView;

#[test]
fn builtin_set_produces_three_banners() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_dir = dir.path().join("frontend").join("public").join("images");

    let renderer = HeroRenderer::new(RenderConfig::default());
    let generated = renderer
        .generate_all(&builtin_heroes(), &output_dir)
        .expect("generation succeeds");

    assert_eq!(generated.len(), 3);

    let mut names: Vec<String> = std::fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["hero-1.jpg", "hero-2.jpg", "hero-3.jpg"]);

    for banner in &generated {
        let on_disk = std::fs::metadata(&banner.path).unwrap().len();
        assert!(on_disk > 0);
        assert_eq!(on_disk, banner.bytes);

        let decoded = image::open(&banner.path).expect("valid JPEG");
        assert_eq!(decoded.dimensions(), (1920, 600));
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }
}

#[test]
fn rerun_overwrites_with_same_sized_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let renderer = HeroRenderer::new(RenderConfig::default());
    let heroes = builtin_heroes();

    let first = renderer.generate_all(&heroes, dir.path()).unwrap();
    let second = renderer.generate_all(&heroes, dir.path()).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        let drift = (a.bytes as i64 - b.bytes as i64).abs();
        assert!(drift <= 1024, "{} changed by {drift} bytes", a.path.display());
    }
}

#[test]
fn unwritable_output_aborts_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A regular file where the output directory should be.
    let blocker = dir.path().join("images");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let renderer = HeroRenderer::new(RenderConfig::default());
    assert!(renderer.generate_all(&builtin_heroes(), &blocker).is_err());
}
