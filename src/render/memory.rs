use indexmap::IndexMap;
use tracing::trace;

use crate::core::ChartConfiguration;
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFactory, Surface, SurfaceProvider};

/// Headless surface registry used by tests and server-side callers.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurfaces {
    surfaces: IndexMap<String, InMemorySurface>,
}

impl InMemorySurfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, id: impl Into<String>) -> Self {
        self.insert(InMemorySurface::new(id));
        self
    }

    /// Registers `surface`, replacing any surface with the same id.
    pub fn insert(&mut self, surface: InMemorySurface) {
        self.surfaces.insert(surface.id.clone(), surface);
    }

    pub fn remove(&mut self, id: &str) -> Option<InMemorySurface> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}

impl SurfaceProvider for InMemorySurfaces {
    type Surface = InMemorySurface;

    fn surface_by_id(&self, id: &str) -> Option<Self::Surface> {
        self.surfaces.get(id).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemorySurface {
    id: String,
    accepts_2d_context: bool,
}

impl InMemorySurface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accepts_2d_context: true,
        }
    }

    /// A surface that exists but never yields a 2-D context.
    #[must_use]
    pub fn refusing_context(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accepts_2d_context: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Surface for InMemorySurface {
    type Context = InMemoryContext;

    fn context_2d(&self) -> Option<Self::Context> {
        self.accepts_2d_context.then(|| InMemoryContext {
            surface_id: self.id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryContext {
    pub surface_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(u64);

impl ChartHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedChart {
    pub handle: ChartHandle,
    pub surface_id: String,
    pub config: ChartConfiguration,
}

/// Chart factory that records every configuration instead of drawing.
///
/// Like the library it stands in for, it keeps every chart it creates:
/// rendering twice on one surface leaves two records.
#[derive(Debug, Clone)]
pub struct RecordingChartFactory {
    available: bool,
    next_handle: u64,
    pending_failure: Option<String>,
    charts: Vec<RecordedChart>,
}

impl Default for RecordingChartFactory {
    fn default() -> Self {
        Self {
            available: true,
            next_handle: 1,
            pending_failure: None,
            charts: Vec::new(),
        }
    }
}

impl RecordingChartFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory standing in for a library that failed to load.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Makes the next `create_chart` call fail with a backend error.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.pending_failure = Some(message.into());
    }

    #[must_use]
    pub fn charts(&self) -> &[RecordedChart] {
        &self.charts
    }

    pub fn charts_on<'a>(&'a self, surface_id: &'a str) -> impl Iterator<Item = &'a RecordedChart> {
        self.charts
            .iter()
            .filter(move |chart| chart.surface_id == surface_id)
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }
}

impl ChartFactory<InMemoryContext> for RecordingChartFactory {
    type Handle = ChartHandle;

    fn is_available(&self) -> bool {
        self.available
    }

    fn create_chart(
        &mut self,
        context: InMemoryContext,
        config: ChartConfiguration,
    ) -> ChartResult<Self::Handle> {
        if let Some(message) = self.pending_failure.take() {
            return Err(ChartError::Backend(message));
        }

        let handle = ChartHandle(self.next_handle);
        self.next_handle += 1;
        trace!(
            handle = handle.id(),
            surface_id = %context.surface_id,
            "record chart"
        );
        self.charts.push(RecordedChart {
            handle,
            surface_id: context.surface_id,
            config,
        });
        Ok(handle)
    }
}
