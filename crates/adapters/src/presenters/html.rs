use retro_grain_domain::RenderPlan;

const NOISE_TEXTURE: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'><filter id='n'><feTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3' stitchTiles='stitch'/></filter><rect width='100%' height='100%' filter='url(%23n)'/></svg>";

/// Standalone page that shows `image_src` the way the editor preview does:
/// CSS filter on the image, overlays stacked above it.
pub fn render_preview_html(image_src: &str, plan: &RenderPlan) -> String {
    let mut layers = Vec::new();
    if let Some(opacity) = plan.grain_opacity {
        layers.push(format!(
            r#"<div class="layer" style="background-image:url(&quot;{NOISE_TEXTURE}&quot;);mix-blend-mode:overlay;opacity:{opacity}"></div>"#
        ));
    }
    if let Some(shadow) = &plan.vignette_shadow {
        layers.push(format!(
            r#"<div class="layer" style="box-shadow:{}"></div>"#,
            escape_html(shadow)
        ));
    }
    if let Some(stamp) = &plan.date_stamp {
        layers.push(format!(
            r#"<div class="date-stamp">{}</div>"#,
            escape_html(stamp)
        ));
    }

    let frame_class = if plan.film_border {
        "frame film-frame"
    } else {
        "frame"
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>RetroGrain preview</title>
<style>
.frame {{ position: relative; display: inline-block; overflow: hidden; border-radius: 6px; }}
.frame img {{ display: block; max-width: 100%; height: auto; }}
.film-frame {{ border: 16px solid #111; box-shadow: 0 0 0 2px #333; }}
.layer {{ position: absolute; inset: 0; pointer-events: none; }}
.date-stamp {{ position: absolute; right: 1rem; bottom: 1rem; color: #ff9a3c; opacity: 0.9; font: 1.1rem monospace; text-shadow: 0 0 4px rgba(255,120,0,0.8); }}
</style>
</head>
<body>
<div class="{frame_class}">
<img src="{src}" alt="Uploaded" style="filter: {filter}">
{layers}
</div>
</body>
</html>
"#,
        src = escape_html(image_src),
        filter = escape_html(&plan.filter),
        layers = layers.join("\n"),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
