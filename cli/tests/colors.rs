use songwalk::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    assert!(colors.song_name("Numb").to_string().contains("Numb"));
    assert!(colors.artist("Linkin Park").to_string().contains("Linkin Park"));
    assert!(colors.success("Success").to_string().contains("Success"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.rank("1.").to_string().contains("1."));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.song_name("Numb").to_string(), "Numb");
    assert_eq!(colors.artist("Linkin Park").to_string(), "Linkin Park");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.error("Error").to_string(), "Error");
}
