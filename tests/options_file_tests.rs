/// Integrationstest: Optionen-Datei schreiben, laden und an den Editor übergeben
use bezier_curve_editor::{CurveEditor, EditorOptions, HeadlessCanvas};
use std::path::PathBuf;

fn temp_config(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "bezier_curve_editor_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_saved_options_drive_editor_start() {
    let path = temp_config("start");
    let options = EditorOptions {
        default_curve: Some("cubic-bezier(0.1, 0.7, 1, 0.1)".to_string()),
        canvas_max_size_px: 300.0,
        ..EditorOptions::default()
    };
    options
        .save_to_file(&path)
        .expect("Optionen sollten speicherbar sein");

    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, options);

    let editor = CurveEditor::with_options(HeadlessCanvas::new(1024.0), loaded, None)
        .expect("Editor sollte starten");
    assert_eq!(
        editor.current_curve_string(),
        "cubic-bezier(0.1, 0.7, 1, 0.1)"
    );
    assert_eq!(editor.options().canvas_size_for_window(1024.0), 300.0);
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_config("missing");
    let _ = std::fs::remove_file(&path);
    assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
}

#[test]
fn test_broken_file_yields_defaults() {
    let path = temp_config("broken");
    std::fs::write(&path, "pointer_buffer_px = \"breit\"\n[[[").unwrap();
    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, EditorOptions::default());
}

#[test]
fn test_invalid_default_curve_falls_back_to_standard_curve() {
    let options = EditorOptions {
        default_curve: Some("linear".to_string()),
        ..EditorOptions::default()
    };
    let editor = CurveEditor::with_options(HeadlessCanvas::new(800.0), options, None).unwrap();
    assert_eq!(
        editor.current_curve_string(),
        "cubic-bezier(0.25, 0.75, 0.75, 0.25)"
    );
}
