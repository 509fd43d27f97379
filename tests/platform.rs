//! Backend da plataforma: emissões antes de `install()` e depois de `seal()`.
//!
//! Arquivo próprio porque o sink global começa vazio em cada binário de
//! teste. Um único teste percorre a sequência do boot em ordem.

use debuglog::drivers::CaptureSink;
use debuglog::{platform, InstallError};

static LATE: CaptureSink<16> = CaptureSink::new();

fn captured() -> Vec<u8> {
    let sink = platform::capture();
    let mut out = vec![0u8; sink.capacity()];
    let n = sink.copy_to(&mut out);
    out.truncate(n);
    out
}

#[test]
fn platform_backend_serves_until_sealed() {
    debuglog::init();
    platform::capture().clear();

    // Antes de qualquer install: backend escolhido no build
    debuglog::emit("early");
    assert_eq!(captured(), b"early");
    assert_eq!(platform::default_sink().name(), "capture");
    assert_eq!(debuglog::active_sink_name(), "capture");

    debuglog::seal();
    assert_eq!(
        debuglog::install(&LATE),
        Err(InstallError::AlreadyInstalled)
    );
    assert_eq!(debuglog::active_sink_name(), "capture");

    platform::capture().clear();
    debuglog::emit("sealed");
    assert!(LATE.is_empty());
    assert_eq!(captured(), b"sealed");

    assert_eq!(platform::verify_delivery("marker"), Some(true));

    #[cfg(feature = "self_test")]
    {
        let (passed, failed, skipped) = debuglog::self_test::run_self_tests();
        assert_eq!((passed, failed, skipped), (5, 0, 0));
    }
}
