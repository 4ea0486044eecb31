use diagram_editor::{
    Diagram, DragController, EndpointMode, GeometryResolver, Point, UnmeasuredLayout,
};

fn main() {
    println!("Diagram Editor - Core Walkthrough");
    println!("=================================\n");

    // Create the seed diagram
    let mut diagram = Diagram::seed();

    println!("✓ Created seed diagram");
    println!("  Nodes: {}", diagram.node_count());
    println!("  Edges: {}", diagram.edge_count());

    for node in diagram.nodes() {
        println!("  └─ {} at ({:.0}, {:.0})", node.id, node.x, node.y);
    }

    // Resolve the edge in center mode
    let resolver = GeometryResolver::new(EndpointMode::Center);
    let geometry = resolver
        .resolve_by_id(&diagram, "stateA-stateB", &UnmeasuredLayout)
        .expect("seed edge resolves in center mode");

    println!("\n✓ Resolved edge stateA → stateB (center mode)");
    println!(
        "  Start: ({:.0}, {:.0})  End: ({:.0}, {:.0})",
        geometry.start.x, geometry.start.y, geometry.end.x, geometry.end.y
    );
    let mid = geometry.midpoint();
    println!("  Label anchor: ({:.0}, {:.0})", mid.x, mid.y);

    // Simulate a drag gesture: grab stateA slightly off-center and move it
    let mut drag = DragController::new();
    drag.pointer_down(&diagram, &UnmeasuredLayout, "stateA", Point::new(110.0, 210.0));

    println!("\n✓ Pressed on stateA at (110, 210)");

    for point in [
        Point::new(160.0, 240.0),
        Point::new(220.0, 280.0),
        Point::new(310.0, 260.0),
    ] {
        drag.pointer_move(&mut diagram, point);
    }
    let released = drag.pointer_up();

    println!("✓ Moved through 3 pointer events and released {:?}", released);

    let node = diagram.get_node("stateA").unwrap();
    println!("  stateA now at ({:.0}, {:.0})", node.x, node.y);

    // The edge follows the store automatically
    let geometry = resolver
        .resolve_by_id(&diagram, "stateA-stateB", &UnmeasuredLayout)
        .unwrap();
    println!(
        "  Edge now starts at ({:.0}, {:.0})",
        geometry.start.x, geometry.start.y
    );

    println!("\n📊 Event log: {} entries", diagram.events().len());
    println!("\n✅ Core walkthrough complete. Run the `gui` binary for the editor.\n");
}
