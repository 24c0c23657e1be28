use image::{Rgba, RgbaImage};
use nodemap::generation::constants::CONNECTION_COLOR;
use nodemap::map::coordinates::map_to_pixel;
use nodemap::nodes::Node;
use std::collections::HashMap;

const NODE_RADIUS: i64 = 6;

/// Draw the graph onto a transparent canvas, `resolution` pixels per map unit
pub fn render_node_map(nodes: &[Node], map_width: u32, map_height: u32, resolution: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(map_width * resolution, map_height * resolution);
    let positions: HashMap<_, _> = nodes
        .iter()
        .map(|n| (n.id, map_to_pixel(n.position, resolution)))
        .collect();

    // Each link is stored on both endpoints; draw it once
    for node in nodes {
        let from = positions[&node.id];
        for other in node.connections().iter().filter(|&&other| other > node.id) {
            if let Some(&to) = positions.get(other) {
                draw_line(&mut canvas, from, to, Rgba(CONNECTION_COLOR));
            }
        }
    }

    for node in nodes {
        draw_circle(&mut canvas, positions[&node.id], NODE_RADIUS, Rgba(node.variant.color()));
    }

    canvas
}

fn put_clipped(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line
fn draw_line(canvas: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_clipped(canvas, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_circle(canvas: &mut RgbaImage, center: (i64, i64), radius: i64, color: Rgba<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_clipped(canvas, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use nodemap::nodes::{NodeId, NodeVariant, link};

    #[test]
    fn test_render_draws_nodes_and_links() {
        let mut nodes = vec![
            Node::new(NodeId(0), NodeVariant::Town, Vec2::new(2.0, 2.0), 1, 5.0),
            Node::new(NodeId(1), NodeVariant::Village, Vec2::new(8.0, 2.0), 1, 5.0),
        ];
        assert!(link(&mut nodes, 0, 1));

        let image = render_node_map(&nodes, 10, 5, 4);

        assert_eq!(image.dimensions(), (40, 20));
        assert_eq!(image.get_pixel(8, 8).0, NodeVariant::Town.color());
        assert_eq!(image.get_pixel(32, 8).0, NodeVariant::Village.color());
        assert_eq!(image.get_pixel(20, 8).0, CONNECTION_COLOR);
        assert_eq!(image.get_pixel(20, 0).0[3], 0);
    }

    #[test]
    fn test_circles_clip_at_edges() {
        let nodes = vec![Node::new(NodeId(0), NodeVariant::Town, Vec2::ZERO, 1, 5.0)];
        let image = render_node_map(&nodes, 2, 2, 4);
        assert_eq!(image.get_pixel(0, 0).0, NodeVariant::Town.color());
    }
}
