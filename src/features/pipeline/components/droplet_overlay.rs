use std::ops::Range;

use leptos::prelude::*;

use crate::config::OverlaySettings;

/// One decorative droplet, sampled once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Droplet {
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub left_pct: f64,
}

impl Droplet {
    /// `random` must yield values in `[0, 1)`, like `Math.random()`.
    pub fn sample(settings: &OverlaySettings, random: &mut impl FnMut() -> f64) -> Self {
        Self {
            size_px: scale(&settings.size, random()),
            delay_s: scale(&settings.delay, random()),
            duration_s: scale(&settings.duration, random()),
            left_pct: scale(&(0.0..100.0), random()),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.2}%; animation: rise {duration:.2}s linear {delay:.2}s infinite;",
            size = self.size_px,
            left = self.left_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

fn scale(range: &Range<f64>, unit: f64) -> f64 {
    range.start + unit * (range.end - range.start)
}

pub fn sample_droplets(
    settings: &OverlaySettings,
    mut random: impl FnMut() -> f64,
) -> Vec<Droplet> {
    (0..settings.droplets_per_column)
        .map(|_| Droplet::sample(settings, &mut random))
        .collect()
}

// Purely visual; never touches the board signals.
#[component]
pub fn DropletOverlay() -> impl IntoView {
    let settings = use_context::<OverlaySettings>().unwrap_or_default();
    let droplets = sample_droplets(&settings, js_sys::Math::random);

    view! {
        <div class="droplet-layer" aria-hidden="true">
            {droplets
                .into_iter()
                .map(|droplet| view! { <div class="droplet" style=droplet.style()></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
