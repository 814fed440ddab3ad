mod memory;

pub use memory::{
    ChartHandle, InMemoryContext, InMemorySurface, InMemorySurfaces, RecordedChart,
    RecordingChartFactory,
};

use crate::core::ChartConfiguration;
use crate::error::ChartResult;

/// Looks up drawing surfaces by identifier (for example a canvas element id).
pub trait SurfaceProvider {
    type Surface: Surface;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface>;
}

/// Addressable drawing target able to hand out a 2-D drawing context.
pub trait Surface {
    type Context;

    /// Returns `None` when the surface refuses a 2-D context, e.g. because
    /// it is already bound to another context kind.
    fn context_2d(&self) -> Option<Self::Context>;
}

/// External charting capability bound to a drawing context type `C`.
///
/// Availability is checked on every render so a library that failed to
/// load degrades to a no-op instead of an error.
pub trait ChartFactory<C> {
    type Handle;

    fn is_available(&self) -> bool;

    /// Creates and draws one chart. The returned handle owns the chart from
    /// then on; callers never destroy earlier charts on the same surface.
    fn create_chart(&mut self, context: C, config: ChartConfiguration)
    -> ChartResult<Self::Handle>;
}

impl<P: SurfaceProvider + ?Sized> SurfaceProvider for &P {
    type Surface = P::Surface;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface> {
        (**self).surface_by_id(id)
    }
}

impl<C, F: ChartFactory<C> + ?Sized> ChartFactory<C> for &mut F {
    type Handle = F::Handle;

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn create_chart(
        &mut self,
        context: C,
        config: ChartConfiguration,
    ) -> ChartResult<Self::Handle> {
        (**self).create_chart(context, config)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoChartFactory, CairoChartHandle, CairoDrawStats, CairoSurfaces};

#[cfg(feature = "web-backend")]
mod web_backend;
#[cfg(feature = "web-backend")]
pub use web_backend::{ChartJsFactory, ChartJsInstance, DomSurfaces, render_mood_chart_js};
