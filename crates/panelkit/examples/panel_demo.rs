//! Lays out a handful of children with every strategy and prints the
//! resulting rectangles.
//!
//! Run with: `RUST_LOG=debug cargo run --example panel_demo`

use panelkit::prelude::*;
use tracing_subscriber::EnvFilter;

const PANELS: &[&str] = &[
    "layout: equal_split",
    "layout: proportional_offset\npositions: {1: 0.5, 2: 1.0}",
    "layout: flow_wrap",
    "layout: grid_pack\nmax_items: 5",
    "layout: curve_follow\npath:\n  start: [0, 120]\n  segments:\n    - [[80, 0], [160, 240], [240, 120]]",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let container = Size::new(240.0, 120.0);
    let mut children: Vec<Child> = (0..6).map(|i| Child::new(ChildId(i))).collect();
    children[4].visibility = Visibility::Collapsed;

    // Host answers with a size derived from the child index
    let mut measurer = |index: usize, _child: &Child, _available: Size| {
        Size::new(40.0 + 10.0 * index as f32, 20.0 + 5.0 * index as f32)
    };

    for yaml in PANELS {
        let config = match PanelConfig::from_yaml(yaml) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("bad config: {e}");
                continue;
            }
        };
        let layout = match config.build() {
            Ok(layout) => layout,
            Err(e) => {
                eprintln!("{}: {e}", config.layout);
                continue;
            }
        };

        let mut engine = LayoutEngine::new();
        match engine.compute(layout.as_ref(), container, &mut children, &mut measurer) {
            Ok(tree) => {
                println!("=== {} (natural {:?}) ===", layout.name(), tree.natural_size);
                for (child, rect) in children.iter().zip(&tree.rects) {
                    println!(
                        "  child {:>2}: x={:7.2} y={:7.2} w={:6.2} h={:6.2}",
                        child.id.0, rect.x, rect.y, rect.width, rect.height
                    );
                }
            }
            Err(e) => eprintln!("{}: {e}", layout.name()),
        }
    }
}
