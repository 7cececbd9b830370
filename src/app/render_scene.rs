//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::PairResult;
use crate::shared::{CircleShape, Legend, LegendKind, MarkerShape, RenderScene, SegmentShape};
use glam::DVec2;

/// Beschriftung der Verbindungslinie in der Legende.
pub const CONNECTING_LINE_LABEL: &str = "Verbindungslinie der Schnittpunkte";

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let scene = &state.scene;
    let options = &state.options;
    let dragged = state.drag.dragged();

    let circles = scene
        .circles()
        .iter()
        .map(|circle| CircleShape {
            id: circle.id,
            center: circle.center,
            radius: circle.radius(),
            color: circle.id.color(),
            dragged: dragged == Some(circle.id),
        })
        .collect();

    let mut legend = Legend::new();
    let mut tangent_segments = Vec::with_capacity(6);
    let mut markers = Vec::with_capacity(3);

    // Tangenten zuerst, damit sie in der Legende vor den Schnittpunkten stehen
    for result in scene.pairs() {
        let Some(intersection) = result.intersection else {
            continue;
        };
        let color = options.tangent_color(result.pair.index());
        tangent_segments.extend(tangent_segments_for(result, intersection, color));
        legend.push(
            format!("Tangenten Kreis {}", result.pair.label()),
            color,
            LegendKind::Line,
        );
    }

    for result in scene.pairs() {
        let Some(position) = result.intersection else {
            continue;
        };
        let color = options.marker_color(result.pair.index());
        markers.push(MarkerShape {
            pair: result.pair,
            position,
            color,
        });
        legend.push(
            format!("Schnittpunkt {}", result.pair.label()),
            color,
            LegendKind::Marker,
        );
    }

    let connecting_line = scene.connecting_line();
    if connecting_line.is_some() {
        legend.push(
            CONNECTING_LINE_LABEL,
            options.connecting_line_color,
            LegendKind::DashedLine,
        );
    }

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        circles,
        tangent_segments,
        markers,
        connecting_line,
        legend,
        options: options.clone(),
    }
}

/// Zwei Segmente pro Paar: je Tangente vom Schnittpunkt bis zum weiter
/// entfernten Tangentenpunkt, so dass beide Berührpunkte abgedeckt sind.
fn tangent_segments_for(
    result: &PairResult,
    intersection: DVec2,
    color: [f32; 4],
) -> [SegmentShape; 2] {
    let farther = |(a, b): (DVec2, DVec2)| {
        if a.distance_squared(intersection) >= b.distance_squared(intersection) {
            a
        } else {
            b
        }
    };

    [
        SegmentShape {
            pair: result.pair,
            from: intersection,
            to: farther(result.tangents.first_line()),
            color,
        },
        SegmentShape {
            pair: result.pair,
            from: intersection,
            to: farther(result.tangents.second_line()),
            color,
        },
    ]
}
