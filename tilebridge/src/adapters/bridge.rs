//! Entry point: classify a source and fill in the convention it lacks.

use crate::adapters::{AsyncFromCallback, CallbackFromAsync, DualSource, QuadtileCodec};
use crate::domain::{
    classifier::{classify, Convention},
    error::{BridgeError, InvalidReason},
    entities::TileSource,
    ports::{CoordinateCodec, Spawner},
};
use alloc::sync::Arc;

/// Adapts tile sources so they answer both calling conventions.
///
/// Holds what synthesised accessors need from the environment: the spawner
/// that drives callback accessors built over `getAsync`, and the codec that
/// expands quadtile indices for `getAsync` built over callbacks.
///
/// # Examples
///
/// ```
/// use futures::future::BoxFuture;
/// use tilebridge::{AsyncSource, Bridge, Completion, Metadata, Payload, RequestOptions, TileSource};
///
/// let legacy = TileSource::new()
///     .with_get_tile(|z, x, y, done: Completion<Payload>| {
///         done.succeed(Payload::new(format!("tile:{z}:{x}:{y}")));
///     })
///     .with_get_grid(|_, _, _, done: Completion<Payload>| done.succeed(Payload::new("{}")))
///     .with_get_info(|done: Completion<Metadata>| done.succeed(Metadata::new()));
///
/// let bridge = Bridge::new(|task: BoxFuture<'static, ()>| futures::executor::block_on(task));
/// let source = bridge.adapt(Some(legacy)).unwrap();
///
/// let tile = futures::executor::block_on(source.get_async(RequestOptions::indexed(2, 11)))
///     .unwrap()
///     .into_tile()
///     .unwrap();
/// assert_eq!(tile.data, b"tile:2:1:3");
/// ```
#[derive(Clone)]
pub struct Bridge {
    spawner: Arc<dyn Spawner>,
    codec: Arc<dyn CoordinateCodec + Send + Sync>,
}

impl Bridge {
    /// Bridge spawning onto `spawner`, decoding indices as standard quadtiles.
    pub fn new(spawner: impl Spawner + 'static) -> Self {
        Self {
            spawner: Arc::new(spawner),
            codec: Arc::new(QuadtileCodec),
        }
    }

    /// Replace the coordinate codec.
    #[must_use]
    pub fn with_codec(mut self, codec: impl CoordinateCodec + Send + Sync + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// Bridge spawning onto the tokio runtime behind `handle`.
    #[cfg(feature = "runtime-tokio")]
    pub fn tokio(handle: tokio::runtime::Handle) -> Self {
        Self::new(crate::adapters::TokioSpawner::new(handle))
    }

    /// Bridge spawning onto the caller's tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn tokio_current() -> Self {
        Self::new(crate::adapters::TokioSpawner::current())
    }

    /// Adapt `source` so it answers both conventions.
    ///
    /// Accessors the source already has are kept as they are; only the
    /// missing ones are synthesised. Adapting an already adapted source
    /// returns its accessors unchanged.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::InvalidArgument`] if `source` is `None`
    /// - [`BridgeError::InvalidInstance`] if the source implements neither
    ///   convention, or has a member that is not callable
    pub fn adapt(&self, source: Option<TileSource>) -> Result<DualSource, BridgeError> {
        let source = source.ok_or(BridgeError::InvalidArgument)?;
        let convention = classify(&source);
        debug!("classified tile source as {:?}", convention);

        let TileSource {
            get_tile,
            get_grid,
            get_info,
            get_async,
        } = source;

        match (
            convention,
            get_tile.into_callable(),
            get_grid.into_callable(),
            get_info.into_callable(),
            get_async.into_callable(),
        ) {
            (Convention::Invalid(reason), ..) => Err(BridgeError::InvalidInstance(reason)),
            (Convention::Both, Some(tile), Some(grid), Some(info), Some(get_async)) => {
                Ok(DualSource::new(tile, grid, info, get_async))
            }
            (Convention::LegacyOnly, Some(tile), Some(grid), Some(info), None) => {
                let get_async =
                    AsyncFromCallback::new(tile.clone(), grid.clone(), info.clone(), self.codec.clone())
                        .into_async_fn();
                Ok(DualSource::new(tile, grid, info, get_async))
            }
            (Convention::ModernOnly, tile, grid, info, Some(get_async)) => {
                let synth = Arc::new(CallbackFromAsync::new(get_async.clone(), self.spawner.clone()));
                Ok(DualSource::new(
                    tile.unwrap_or_else(|| CallbackFromAsync::tile_fn(&synth)),
                    grid.unwrap_or_else(|| CallbackFromAsync::grid_fn(&synth)),
                    info.unwrap_or_else(|| CallbackFromAsync::info_fn(&synth)),
                    get_async,
                ))
            }
            // A valid verdict always agrees with the member states it was computed from.
            _ => Err(BridgeError::InvalidInstance(InvalidReason::NoConvention)),
        }
    }
}

impl core::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bridge").finish_non_exhaustive()
    }
}

/// Adapt `source` with a one-off [`Bridge`] on `spawner`.
///
/// # Errors
///
/// See [`Bridge::adapt`].
pub fn bridge(source: Option<TileSource>, spawner: impl Spawner + 'static) -> Result<DualSource, BridgeError> {
    Bridge::new(spawner).adapt(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::MemberName,
        ports::{AsyncSource, CallbackSource, Completion},
        value_objects::{Envelope, Metadata, Payload, RequestOptions},
    };
    use futures::future::BoxFuture;
    use futures::FutureExt;

    fn inline() -> Bridge {
        Bridge::new(|task: BoxFuture<'static, ()>| futures::executor::block_on(task))
    }

    fn legacy() -> TileSource {
        TileSource::new()
            .with_get_tile(|z: u8, x: u32, y: u32, done: Completion<Payload>| {
                done.succeed(Payload::new(format!("tile:{}:{}:{}", z, x, y)))
            })
            .with_get_grid(|_: u8, _: u32, _: u32, done: Completion<Payload>| {
                done.succeed(Payload::new("grid"))
            })
            .with_get_info(|done: Completion<Metadata>| done.succeed(Metadata::new().with("name", "legacy")))
    }

    fn modern() -> TileSource {
        TileSource::new().with_get_async(|options: RequestOptions| {
            async move {
                match options.kind.as_deref() {
                    Some("info") => Ok(Envelope::Info(Metadata::new().with("name", "modern"))),
                    Some("grid") => Ok(Envelope::Grid(Payload::new("grid"))),
                    _ => Ok::<_, crate::SourceError>(Envelope::Tile(Payload::new("tile"))),
                }
            }
            .boxed()
        })
    }

    #[test]
    fn test_missing_source() {
        assert_eq!(inline().adapt(None).unwrap_err(), BridgeError::InvalidArgument);
    }

    #[test]
    fn test_invalid_source() {
        let err = inline().adapt(Some(TileSource::new())).unwrap_err();
        assert_eq!(err, BridgeError::InvalidInstance(InvalidReason::NoConvention));
    }

    #[test]
    fn test_non_callable_member() {
        let err = inline()
            .adapt(Some(legacy().with_value(MemberName::GetAsync, 1u8)))
            .unwrap_err();
        assert_eq!(
            err,
            BridgeError::InvalidInstance(InvalidReason::NotCallable(MemberName::GetAsync))
        );
    }

    #[test]
    fn test_legacy_gains_async() {
        let source = inline().adapt(Some(legacy())).unwrap();
        let tile = futures::executor::block_on(source.get_async(RequestOptions::tile(1, 0, 1)))
            .unwrap()
            .into_tile()
            .unwrap();
        assert_eq!(tile.data, b"tile:1:0:1");
    }

    #[test]
    fn test_modern_gains_callbacks() {
        let source = inline().adapt(Some(modern())).unwrap();
        let (done, rx) = Completion::channel();
        source.get_info(done);
        let info = futures::executor::block_on(rx).unwrap().unwrap();
        assert_eq!(info.name(), Some("modern"));
    }

    #[test]
    fn test_partial_modern_keeps_existing_callback() {
        let source = modern().with_get_tile(|_: u8, _: u32, _: u32, done: Completion<Payload>| {
            done.succeed(Payload::new("native"))
        });
        let dual = inline().adapt(Some(source)).unwrap();

        let (done, rx) = Completion::channel();
        dual.get_tile(0, 0, 0, done);
        assert_eq!(futures::executor::block_on(rx).unwrap().unwrap().data, b"native");

        let (done, rx) = Completion::channel();
        dual.get_grid(0, 0, 0, done);
        assert_eq!(futures::executor::block_on(rx).unwrap().unwrap().data, b"grid");
    }

    #[test]
    fn test_adapting_twice_is_identity() {
        let bridge = inline();
        let once = bridge.adapt(Some(legacy())).unwrap();
        let twice = bridge.adapt(Some(once.clone().into())).unwrap();
        assert!(once.ptr_eq(&twice));
    }

    #[test]
    fn test_custom_codec() {
        struct Transposed;

        impl CoordinateCodec for Transposed {
            fn index_to_xy(&self, index: u64) -> (u32, u32) {
                let (x, y) = tilebridge_quadtile::index_to_xy(index);
                (y, x)
            }
        }

        let source = inline().with_codec(Transposed).adapt(Some(legacy())).unwrap();
        let tile = futures::executor::block_on(source.get_async(RequestOptions::indexed(2, 11)))
            .unwrap()
            .into_tile()
            .unwrap();
        assert_eq!(tile.data, b"tile:2:3:1");
    }

    #[test]
    fn test_free_function() {
        let spawner = |task: BoxFuture<'static, ()>| futures::executor::block_on(task);
        assert!(bridge(Some(modern()), spawner).is_ok());
    }
}
