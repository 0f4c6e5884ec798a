use polyvox::domain::{UnmappedLanguage, VoiceId, VoiceMap, resolve_voice};

#[test]
fn given_mapped_language_when_resolving_then_returns_voice() {
    assert_eq!(resolve_voice("es").unwrap(), VoiceId::new("Lupe"));
    assert_eq!(resolve_voice("fr").unwrap().as_str(), "Lea");
    assert_eq!(resolve_voice("pt").unwrap().as_str(), "Camila");
}

#[test]
fn given_unmapped_language_when_resolving_then_error_names_the_language() {
    let err = resolve_voice("xx").unwrap_err();

    assert_eq!(err, UnmappedLanguage("xx".to_string()));
    assert!(err.to_string().contains("'xx'"));
}

#[test]
fn given_regional_code_when_resolving_then_falls_back_to_primary_subtag() {
    assert_eq!(resolve_voice("es-MX").unwrap().as_str(), "Lupe");
}

#[test]
fn given_overrides_when_resolving_then_override_wins_and_new_languages_resolve() {
    let voices = VoiceMap::with_overrides([("es", "Conchita"), ("ja", "Mizuki")]);

    assert_eq!(voices.resolve("es").unwrap().as_str(), "Conchita");
    assert_eq!(voices.resolve("ja").unwrap().as_str(), "Mizuki");
    assert_eq!(voices.resolve("fr").unwrap().as_str(), "Lea");
}
