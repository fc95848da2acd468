//! Both conventions exercised on bridged callback and async sources.

use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;
use tilebridge::{
    AsyncSource, Bridge, BridgeError, CallbackSource, Completion, DualSource, EnvelopeFuture,
    Envelope, Headers, InvalidReason, MemberName, Metadata, Payload, RequestOptions, SourceError,
    TileSource,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tokio_bridge() -> Bridge {
    Bridge::new(|task: BoxFuture<'static, ()>| {
        tokio::spawn(task);
    })
}

fn hdrs() -> Headers {
    Headers::new().with("h", "1")
}

/// Callback-convention source, optionally failing every request.
struct Legacy {
    fail: bool,
}

impl Legacy {
    fn source(fail: bool) -> TileSource {
        TileSource::from_callbacks(Arc::new(Legacy { fail }))
    }
}

impl CallbackSource for Legacy {
    fn get_tile(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        if self.fail {
            return done.fail(SourceError::message("tile"));
        }
        done.succeed(Payload::new(format!("tile:{}:{}:{}", z, x, y)).with_headers(hdrs()))
    }

    fn get_grid(&self, z: u8, x: u32, y: u32, done: Completion<Payload>) {
        if self.fail {
            return done.fail(SourceError::message("grid"));
        }
        done.succeed(Payload::new(format!("grid:{}:{}:{}", z, x, y)).with_headers(hdrs()))
    }

    fn get_info(&self, done: Completion<Metadata>) {
        if self.fail {
            return done.fail(SourceError::message("info"));
        }
        done.succeed(Metadata::new().with("name", "info"))
    }
}

/// Async-convention source delegating to a bridged [`Legacy`].
struct Modern {
    legacy: DualSource,
}

impl Modern {
    fn source(fail: bool) -> Result<TileSource> {
        let legacy = tokio_bridge().adapt(Some(Legacy::source(fail)))?;
        Ok(TileSource::from_async(Arc::new(Modern { legacy })))
    }
}

impl AsyncSource for Modern {
    fn get_async(&self, options: RequestOptions) -> EnvelopeFuture {
        self.legacy.get_async(options)
    }
}

fn sources(fail: bool) -> Result<Vec<(&'static str, TileSource)>> {
    Ok(vec![("legacy", Legacy::source(fail)), ("modern", Modern::source(fail)?)])
}

async fn call_tile(source: &DualSource, grid: bool, z: u8, x: u32, y: u32) -> Result<Payload, SourceError> {
    let (done, rx) = Completion::channel();
    if grid {
        source.get_grid(z, x, y, done);
    } else {
        source.get_tile(z, x, y, done);
    }
    rx.await.unwrap_or(Err(SourceError::message("completion dropped")))
}

async fn call_info(source: &DualSource) -> Result<Metadata, SourceError> {
    let (done, rx) = Completion::channel();
    source.get_info(done);
    rx.await.unwrap_or(Err(SourceError::message("completion dropped")))
}

fn dummy(bad: MemberName) -> TileSource {
    MemberName::ALL
        .into_iter()
        .fold(TileSource::new(), |source, name| match name {
            MemberName::GetTile => source.with_get_tile(|_: u8, _: u32, _: u32, _: Completion<Payload>| {}),
            MemberName::GetGrid => source.with_get_grid(|_: u8, _: u32, _: u32, _: Completion<Payload>| {}),
            MemberName::GetInfo => source.with_get_info(|_: Completion<Metadata>| {}),
            MemberName::GetAsync => {
                source.with_get_async(|_: RequestOptions| -> EnvelopeFuture { unreachable!() })
            }
        })
        .with_value(bad, 42)
}

#[test]
fn test_missing_source_is_invalid_argument() {
    init_logger();
    let err = tokio_bridge().adapt(None).unwrap_err();
    assert_eq!(err, BridgeError::InvalidArgument);
    assert_eq!(err.to_string(), "Invalid source argument");
}

#[test]
fn test_non_callable_member_is_rejected() {
    init_logger();
    for bad in MemberName::ALL {
        let err = tokio_bridge().adapt(Some(dummy(bad))).unwrap_err();
        assert_eq!(err, BridgeError::InvalidInstance(InvalidReason::NotCallable(bad)));
        assert!(err.to_string().starts_with("Argument is not a valid tile source instance"));
    }
}

#[test]
fn test_sources_without_a_convention_are_rejected() {
    init_logger();
    let bridge = tokio_bridge();
    assert!(matches!(
        bridge.adapt(Some(TileSource::new())),
        Err(BridgeError::InvalidInstance(InvalidReason::NoConvention))
    ));
    assert!(matches!(
        bridge.adapt(Some(TileSource::new().with_value(MemberName::GetTile, 42))),
        Err(BridgeError::InvalidInstance(InvalidReason::NotCallable(MemberName::GetTile)))
    ));
    let lone_tile = Legacy::source(false)
        .without(MemberName::GetGrid)
        .without(MemberName::GetInfo);
    assert!(matches!(
        bridge.adapt(Some(lone_tile)),
        Err(BridgeError::InvalidInstance(InvalidReason::PartialLegacy { .. }))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_callback_calls() -> Result<()> {
    init_logger();
    for (label, source) in sources(false)? {
        let source = tokio_bridge().adapt(Some(source))?;

        let tile = call_tile(&source, false, 2, 1, 0).await?;
        assert_eq!(tile.data, b"tile:2:1:0", "{}", label);
        assert_eq!(tile.headers, Some(hdrs()), "{}", label);

        let grid = call_tile(&source, true, 2, 1, 0).await?;
        assert_eq!(grid.data, b"grid:2:1:0", "{}", label);

        let info = call_info(&source).await?;
        assert_eq!(info.name(), Some("info"), "{}", label);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_callback_errors() -> Result<()> {
    init_logger();
    for (label, source) in sources(true)? {
        let source = tokio_bridge().adapt(Some(source))?;
        let tile = call_tile(&source, false, 0, 0, 0).await.unwrap_err();
        assert_eq!(tile.to_string(), "tile", "{}", label);
        let grid = call_tile(&source, true, 0, 0, 0).await.unwrap_err();
        assert_eq!(grid.to_string(), "grid", "{}", label);
        let info = call_info(&source).await.unwrap_err();
        assert_eq!(info.to_string(), "info", "{}", label);
        assert!(info.is_upstream(), "{}", label);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_async_calls() -> Result<()> {
    init_logger();
    let cases = [
        (RequestOptions::tile(2, 1, 0), "tile:2:1:0"),
        (RequestOptions::tile(2, 1, 0).with_kind("tile"), "tile:2:1:0"),
        (RequestOptions::grid(2, 1, 0), "grid:2:1:0"),
        (RequestOptions::indexed(2, 11), "tile:2:1:3"),
        (RequestOptions::indexed(2, 11).with_kind("tile"), "tile:2:1:3"),
        (RequestOptions::indexed(2, 11).with_kind("grid"), "grid:2:1:3"),
    ];
    for (label, source) in sources(false)? {
        let source = tokio_bridge().adapt(Some(source))?;
        for (options, expected) in cases.clone() {
            let envelope = source.get_async(options.clone()).await?;
            assert_eq!(envelope.headers(), Some(&hdrs()), "{} {:?}", label, options);
            let data = match envelope {
                Envelope::Tile(p) | Envelope::Grid(p) => p.data,
                Envelope::Info(_) => panic!("{} {:?} answered with info", label, options),
            };
            assert_eq!(data, expected.as_bytes(), "{} {:?}", label, options);
        }

        let info = source.get_async(RequestOptions::info()).await?.into_info()?;
        assert_eq!(info.name(), Some("info"), "{}", label);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_info_ignores_bad_index() -> Result<()> {
    init_logger();
    let source = tokio_bridge().adapt(Some(Legacy::source(false)))?;
    let info = source
        .get_async(RequestOptions::info().with_index(-10))
        .await?
        .into_info()?;
    assert_eq!(info.name(), Some("info"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_async_errors() -> Result<()> {
    init_logger();
    let cases = [
        (RequestOptions::tile(2, 1, 0), "tile"),
        (RequestOptions::tile(2, 1, 0).with_kind("tile"), "tile"),
        (RequestOptions::grid(2, 1, 0), "grid"),
        (RequestOptions::info(), "info"),
        (RequestOptions::default().with_kind("bad"), "Unknown type \"bad\""),
    ];
    for (label, source) in sources(true)? {
        let source = tokio_bridge().adapt(Some(source))?;
        for (options, expected) in cases.clone() {
            let err = source.get_async(options.clone()).await.unwrap_err();
            assert_eq!(err.to_string(), expected, "{} {:?}", label, options);
        }
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_type_is_an_error_value() -> Result<()> {
    init_logger();
    let source = tokio_bridge().adapt(Some(Legacy::source(false)))?;
    match source.get_async(RequestOptions::tile(0, 0, 0).with_kind("bad")).await {
        Err(SourceError::UnknownType(kind)) => assert_eq!(kind, "bad"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bridging_is_idempotent() -> Result<()> {
    init_logger();
    for (label, source) in sources(false)? {
        let once = tokio_bridge().adapt(Some(source))?;
        let twice = tokio_bridge().adapt(Some(once.clone().into()))?;
        assert!(once.ptr_eq(&twice), "{}", label);

        let tile = call_tile(&twice, false, 2, 1, 0).await?;
        assert_eq!(tile.data, b"tile:2:1:0", "{}", label);
    }
    Ok(())
}
