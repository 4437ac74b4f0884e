//! Multi-fragment SVG composition.

use futures::stream::{self, StreamExt};
use tracing::{instrument, warn};

use symbol_common::{
    IconFragmentRef, RenderOptions, RenderParams, SymbolError, SymbolResult,
};

use crate::decoder::decode_weather_code;
use crate::extract::extract_svg_parts;
use crate::optimize::{finish, SvgOptimizer};
use crate::store::FragmentStore;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Upper bound on fragment reads in flight for one symbol.
const MAX_CONCURRENT_LOADS: usize = 8;

/// Transform for a fragment: `translate(x y) scale(s)` then an optional
/// `rotate(angle cx cy)`.
pub fn fragment_transform(fragment: &IconFragmentRef) -> String {
    let mut transform = format!(
        "translate({} {}) scale({})",
        fragment.x, fragment.y, fragment.scale
    );
    if let Some(rotation) = &fragment.rotation {
        transform.push_str(&format!(
            " rotate({} {} {})",
            rotation.angle, rotation.cx, rotation.cy
        ));
    }
    transform
}

/// Load all fragments concurrently, keeping fragment order.
///
/// Missing fragments come back as `None` and are logged; any other store
/// failure aborts the batch.
pub async fn load_fragments(
    store: &dyn FragmentStore,
    fragments: &[IconFragmentRef],
) -> SymbolResult<Vec<Option<String>>> {
    let loads: Vec<_> = fragments.iter().map(|f| store.load(&f.name)).collect();
    let results: Vec<_> = stream::iter(loads)
        .buffered(MAX_CONCURRENT_LOADS)
        .collect()
        .await;

    results
        .into_iter()
        .zip(fragments)
        .map(|(result, fragment)| match result {
            Ok(markup) => Ok(Some(markup)),
            Err(SymbolError::ResourceMissing(detail)) => {
                warn!(
                    fragment = %fragment.name,
                    detail = %detail,
                    "SVG fragment not found, skipping"
                );
                metrics::counter!("symbol_fragments_skipped_total").increment(1);
                Ok(None)
            }
            Err(e) => Err(e),
        })
        .collect()
}

/// Merge loaded fragments into a single SVG document.
///
/// `sources[i]` is the markup for `fragments[i]`; `None` entries and
/// entries without an `<svg>` element are skipped. Styles are concatenated
/// in order, identical defs are emitted once.
pub fn compose_fragments(
    fragments: &[IconFragmentRef],
    sources: &[Option<String>],
    params: &RenderParams,
) -> SymbolResult<String> {
    let mut styles = String::new();
    let mut defs: Vec<String> = Vec::new();
    let mut groups = String::new();
    let mut rendered = 0usize;

    for (fragment, source) in fragments.iter().zip(sources) {
        let Some(markup) = source else {
            continue;
        };

        let Some(parsed) = extract_svg_parts(markup) else {
            warn!(fragment = %fragment.name, "SVG fragment has no <svg> element, skipping");
            metrics::counter!("symbol_fragments_skipped_total").increment(1);
            continue;
        };

        styles.push_str(&parsed.style);
        styles.push('\n');

        if !parsed.defs.is_empty() && !defs.contains(&parsed.defs) {
            defs.push(parsed.defs);
        }

        groups.push_str(&format!(
            "<g transform=\"{}\">{}</g>\n",
            fragment_transform(fragment),
            parsed.main_content
        ));
        rendered += 1;
    }

    if rendered == 0 {
        return Err(SymbolError::RenderFailure(
            "no renderable fragments for symbol".to_string(),
        ));
    }

    Ok(format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"{view_box}\" xmlns=\"{ns}\">\n\
         <defs>\n\
         <style type=\"text/css\">\n{styles}</style>\n\
         {defs}\n\
         </defs>\n\
         {groups}\
         </svg>\n",
        width = params.width,
        height = params.height,
        view_box = params.view_box,
        ns = SVG_NS,
        styles = styles,
        defs = defs.concat(),
        groups = groups,
    ))
}

/// Decode a weather code and render its composite symbol.
#[instrument(skip(store, optimizer, params))]
pub async fn render_weather_symbol(
    code: &str,
    params: &RenderParams,
    store: &dyn FragmentStore,
    optimizer: &dyn SvgOptimizer,
    options: RenderOptions,
) -> SymbolResult<String> {
    let fragments = decode_weather_code(code)?;
    let sources = load_fragments(store, &fragments).await?;
    let svg = compose_fragments(&fragments, &sources, params)?;
    finish(svg, optimizer, options)
}
