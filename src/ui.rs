use crate::{
    BoundingBox, Diagram, DragController, EdgeGeometry, EndpointMode, GeometryResolver,
    LayoutQuery, Point,
};
use egui::{
    epaint::PathShape, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke,
};
use std::collections::HashMap;

const NODE_PADDING: f32 = 16.0;
const NODE_ROUNDING: f32 = 6.0;

/// Main application state
pub struct DiagramEditorApp {
    /// The diagram being edited
    diagram: Diagram,

    /// Edge endpoint strategy
    resolver: GeometryResolver,

    /// Pointer gesture state machine
    drag: DragController,

    /// Rendered node boxes measured on the previous paint, in canvas
    /// coordinates; empty before the first frame
    node_boxes: HashMap<String, BoundingBox>,

    /// Currently selected node
    selected_node: Option<String>,

    /// Show background grid
    show_grid: bool,

    /// Status message
    status_message: String,
}

impl Default for DiagramEditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramEditorApp {
    pub fn new() -> Self {
        Self {
            diagram: Diagram::seed(),
            resolver: GeometryResolver::new(EndpointMode::Center),
            drag: DragController::new(),
            node_boxes: HashMap::new(),
            selected_node: None,
            show_grid: true,
            status_message: "Welcome to Diagram Editor! Drag nodes to move them.".to_string(),
        }
    }

    /// Render the entire UI
    fn render_ui(&mut self, ctx: &egui::Context) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_grid, "Show Grid");
                    ui.separator();
                    ui.label("Edge Endpoints:");
                    let mut mode = self.resolver.mode();
                    ui.radio_value(&mut mode, EndpointMode::Center, "Node centers");
                    ui.radio_value(&mut mode, EndpointMode::Boundary, "Box boundaries");
                    if mode != self.resolver.mode() {
                        self.resolver.set_mode(mode);
                    }
                });

                ui.menu_button("Help", |ui| {
                    ui.label("Drag a node to move it; edges follow.");
                    ui.label("Click to select, double-click to copy the id.");
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.separator();
                ui.label(format!(
                    "Nodes: {}  Edges: {}",
                    self.diagram.node_count(),
                    self.diagram.edge_count()
                ));
            });
        });

        // Right panel (properties)
        egui::SidePanel::right("properties_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.render_properties_panel(ui);
            });

        // Central panel (canvas)
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_canvas(ui);
        });
    }

    /// Render the properties panel
    fn render_properties_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Properties");
        ui.separator();

        let Some(node_id) = self.selected_node.clone() else {
            ui.label("No node selected");
            ui.separator();
            ui.label("Click on a node to view its properties");
            return;
        };

        let Some(node) = self.diagram.get_node(&node_id) else {
            return;
        };
        let (label, x, y) = (node.label.clone(), node.x, node.y);

        ui.label(format!("Node ID: {}", node_id));
        ui.label(format!("Label: {}", label));
        ui.label(format!("Position: ({:.0}, {:.0})", x, y));

        ui.separator();

        ui.label("Outgoing Edges:");
        let outgoing = self.diagram.outgoing_edges(&node_id);
        if outgoing.is_empty() {
            ui.label("  (none)");
        } else {
            for edge in outgoing {
                ui.label(format!("  → {}", edge.to));
            }
        }

        ui.label("Incoming Edges:");
        let incoming = self.diagram.incoming_edges(&node_id);
        if incoming.is_empty() {
            ui.label("  (none)");
        } else {
            for edge in incoming {
                ui.label(format!("  ← {}", edge.from));
            }
        }
    }

    /// Render the canvas with nodes and edges
    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let canvas_rect = response.rect;

        let pointer_canvas = response
            .interact_pointer_pos()
            .map(|p| self.screen_to_canvas(p, canvas_rect));

        // Press: route to the drag controller when a node is under the
        // pointer (topmost wins)
        if response.drag_started() {
            if let Some(pointer) = pointer_canvas {
                if let Some(node_id) = self.node_at(pointer) {
                    if self
                        .drag
                        .pointer_down(&self.diagram, &self.node_boxes, &node_id, pointer)
                    {
                        self.selected_node = Some(node_id.clone());
                        self.status_message = format!("Dragging {}", node_id);
                    }
                }
            }
        }

        // Move: each event recomputes from the frozen grab offset
        if response.dragged() {
            if let Some(pointer) = pointer_canvas {
                self.drag.pointer_move(&mut self.diagram, pointer);
            }
        }

        // Release: ends the gesture on every exit path
        if self.drag.is_dragging() && !response.dragged() && ui.input(|i| !i.pointer.primary_down())
        {
            if let Some(node_id) = self.drag.pointer_up() {
                self.status_message = format!("Moved {}", node_id);
            }
        }

        if self.show_grid {
            self.draw_grid(&painter, canvas_rect);
        }

        // Draw edges first so nodes paint over them. Boundary mode reads
        // the boxes measured on the previous frame; unresolved edges are
        // skipped until a box exists.
        let edges: Vec<_> = self.diagram.edges().cloned().collect();
        for edge in &edges {
            if let Some(geometry) = self.resolver.resolve(&self.diagram, edge, &self.node_boxes) {
                self.draw_edge(&painter, canvas_rect, &geometry, edge.label.as_deref(), &edge.to);
            }
        }

        // Draw nodes and re-measure their boxes for the next cycle
        let nodes: Vec<_> = self.diagram.nodes().cloned().collect();
        for node in &nodes {
            let node_box = self.draw_node(&painter, canvas_rect, node);
            self.node_boxes.insert(node.id.clone(), node_box);
        }

        // Click selects; double-click copies the id
        if response.double_clicked() {
            if let Some(pointer) = pointer_canvas {
                if let Some(node_id) = self.node_at(pointer) {
                    match self.copy_to_clipboard(&node_id) {
                        Ok(()) => self.status_message = format!("✓ Copied node id: {}", node_id),
                        Err(e) => self.status_message = format!("❌ Failed to copy: {}", e),
                    }
                }
            }
        } else if response.clicked() && !self.drag.is_dragging() {
            if let Some(pointer) = pointer_canvas {
                self.selected_node = self.node_at(pointer);
                self.status_message = match &self.selected_node {
                    Some(id) => format!("Selected: {}", id),
                    None => "No node selected".to_string(),
                };
            }
        }
    }

    /// Topmost node whose rendered box contains the point
    fn node_at(&self, point: Point) -> Option<String> {
        self.diagram
            .nodes()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .find(|node| {
                self.node_boxes
                    .node_box(&node.id)
                    .is_some_and(|b| b.contains_point(point))
            })
            .map(|node| node.id.clone())
    }

    /// Draw a node centered on its stored position; returns the rendered
    /// box in canvas coordinates
    fn draw_node(&self, painter: &egui::Painter, canvas_rect: Rect, node: &crate::Node) -> BoundingBox {
        let galley = painter.layout_no_wrap(
            node.label.clone(),
            FontId::proportional(14.0),
            Color32::DARK_GRAY,
        );

        let width = galley.size().x + NODE_PADDING * 2.0;
        let height = galley.size().y + NODE_PADDING * 2.0;
        let node_box = BoundingBox::centered_at(node.position(), width, height);

        let screen_rect = self.canvas_to_screen_rect(&node_box, canvas_rect);

        let (fill_color, stroke_color, stroke_width) =
            if self.selected_node.as_deref() == Some(node.id.as_str()) {
                (Color32::from_rgb(220, 240, 255), Color32::BLUE, 3.0)
            } else {
                (Color32::from_rgb(240, 240, 240), Color32::DARK_GRAY, 2.0)
            };

        painter.rect(
            screen_rect,
            NODE_ROUNDING,
            fill_color,
            Stroke::new(stroke_width, stroke_color),
        );

        painter.galley(
            screen_rect.center() - galley.size() / 2.0,
            galley,
            Color32::DARK_GRAY,
        );

        node_box
    }

    /// Draw an edge arrow with its label
    fn draw_edge(
        &self,
        painter: &egui::Painter,
        canvas_rect: Rect,
        geometry: &EdgeGeometry,
        label: Option<&str>,
        to_id: &str,
    ) {
        let start = self.canvas_to_screen(pos2(geometry.start.x, geometry.start.y), canvas_rect);
        let end = self.canvas_to_screen(pos2(geometry.end.x, geometry.end.y), canvas_rect);

        let arrow_color = Color32::from_rgb(0, 100, 200);
        let stroke = Stroke::new(2.0, arrow_color);

        painter.line_segment([start, end], stroke);

        // Arrowhead. In center mode the line runs into the destination box,
        // so pull the tip back to its edge; boundary endpoints already sit
        // on the box.
        let dir = (end - start).normalized();
        if dir.x.is_finite() && dir.y.is_finite() {
            let perpendicular = vec2(-dir.y, dir.x);
            let arrow_size = 10.0;
            let arrow_tip = match self.resolver.mode() {
                EndpointMode::Center => {
                    let inset = self
                        .node_boxes
                        .node_box(to_id)
                        .map(|b| b.width.min(b.height) * 0.5)
                        .unwrap_or(0.0);
                    end - dir * inset
                }
                EndpointMode::Boundary => end,
            };

            let arrow_point1 = arrow_tip - dir * arrow_size + perpendicular * arrow_size * 0.5;
            let arrow_point2 = arrow_tip - dir * arrow_size - perpendicular * arrow_size * 0.5;

            let arrow_shape = PathShape::convex_polygon(
                vec![arrow_tip, arrow_point1, arrow_point2],
                arrow_color,
                stroke,
            );
            painter.add(arrow_shape);
        }

        if let Some(label) = label {
            let anchor = geometry.label_box().center();
            painter.text(
                self.canvas_to_screen(pos2(anchor.x, anchor.y), canvas_rect),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                Color32::from_gray(90),
            );
        }
    }

    /// Draw grid
    fn draw_grid(&self, painter: &egui::Painter, canvas_rect: Rect) {
        let grid_spacing = 50.0;
        let grid_color = Color32::from_gray(220);

        let mut x = canvas_rect.left();
        while x < canvas_rect.right() {
            painter.line_segment(
                [pos2(x, canvas_rect.top()), pos2(x, canvas_rect.bottom())],
                Stroke::new(1.0, grid_color),
            );
            x += grid_spacing;
        }

        let mut y = canvas_rect.top();
        while y < canvas_rect.bottom() {
            painter.line_segment(
                [pos2(canvas_rect.left(), y), pos2(canvas_rect.right(), y)],
                Stroke::new(1.0, grid_color),
            );
            y += grid_spacing;
        }
    }

    /// Convert canvas coordinates to screen coordinates
    fn canvas_to_screen(&self, pos: Pos2, canvas_rect: Rect) -> Pos2 {
        canvas_rect.left_top() + vec2(pos.x, pos.y)
    }

    /// Convert screen coordinates to canvas coordinates
    fn screen_to_canvas(&self, pos: Pos2, canvas_rect: Rect) -> Point {
        let relative = pos - canvas_rect.left_top();
        Point::new(relative.x, relative.y)
    }

    /// Convert a canvas box to a screen rectangle
    fn canvas_to_screen_rect(&self, b: &BoundingBox, canvas_rect: Rect) -> Rect {
        let top_left = self.canvas_to_screen(pos2(b.x, b.y), canvas_rect);
        Rect::from_min_size(top_left, vec2(b.width, b.height))
    }

    /// Copy text to clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<(), String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new().map_err(|e| format!("{}", e))?;
        clipboard.set_text(text).map_err(|e| format!("{}", e))?;
        Ok(())
    }
}

impl eframe::App for DiagramEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_ui(ctx);
    }
}
