use diagram_editor::DiagramEditorApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_title("Diagram Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Diagram Editor",
        options,
        Box::new(|_cc| Ok(Box::new(DiagramEditorApp::new()))),
    )
}
