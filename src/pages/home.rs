use leptos::prelude::*;
use log::warn;

use crate::components::sketch_canvas::{SketchCanvas, SketchData, SketchLink, SketchPoint};
use crate::sketch::{LineStyleOverride, PointStyleOverride, StyleError};

/// A ring of points linked to their neighbours, each link styled differently.
fn generate_sample_data(n: usize) -> Result<SketchData, StyleError> {
	let (cx, cy, r) = (400.0, 300.0, 180.0);
	let points: Vec<SketchPoint> = (0..n)
		.map(|i| {
			let angle = i as f64 * std::f64::consts::TAU / n as f64;
			let style = (i % 3 == 0)
				.then(|| PointStyleOverride::default().with_wave_amplitude(3.0));
			SketchPoint {
				id: i.to_string(),
				x: cx + r * angle.cos(),
				y: cy + r * angle.sin(),
				style,
			}
		})
		.collect();

	let mut links = Vec::with_capacity(n);
	for i in 0..n {
		let style = match i % 4 {
			0 => None,
			1 => Some(LineStyleOverride::default().with_segments(8)?.with_jitter(2.0)?),
			2 => Some(
				LineStyleOverride::default()
					.with_segments(12)?
					.with_wave_amplitude(6.0)
					.with_taper(true),
			),
			_ => Some(LineStyleOverride::default().with_segments(0)?),
		};
		links.push(SketchLink {
			source: i.to_string(),
			target: ((i + 1) % n).to_string(),
			style,
		});
	}

	Ok(SketchData { points, links })
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let sketch_data = Signal::derive(move || {
		generate_sample_data(12).unwrap_or_else(|e| {
			warn!("sample sketch rejected: {e}");
			SketchData::default()
		})
	});

	view! {
		<div class="fullscreen-sketch">
			<SketchCanvas data=sketch_data fullscreen=true />
			<div class="sketch-overlay">
				<h1>"Sketch"</h1>
				<p class="subtitle">
					"Drag points to move them. Drag the background to box-select. Double-click to add a point linked to the selection."
				</p>
			</div>
		</div>
	}
}
