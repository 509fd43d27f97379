//! Framework de testes no alvo
//!
//! Roda checagens no hardware real (onde `cargo test` não chega) e reporta
//! pelos macros de log.

use crate::core::logging::{LineBuf, P_FAIL, P_OK};

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

/// Um caso de teste
#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    /// Cria um caso de teste
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Executa suite de testes. Retorna (passed, failed, skipped).
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> (usize, usize, usize) {
    crate::dinfo!("=== Executando suite ===");

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::dok!(test.name);
                passed += 1;
            }
            TestResult::Failed => {
                crate::dfail!(test.name);
                failed += 1;
            }
            TestResult::Skipped => {
                crate::dwarn!(test.name);
                skipped += 1;
            }
        }
    }

    // Resumo: "<suite>: passed=N failed=N skipped=N" em uma linha
    if cfg!(not(feature = "no_logs")) {
        let mut line = LineBuf::new();
        line.push_str(if failed == 0 { P_OK } else { P_FAIL })
            .push_str(name)
            .push_str(": passed=")
            .push_dec(passed as u64)
            .push_str(" failed=")
            .push_dec(failed as u64)
            .push_str(" skipped=")
            .push_dec(skipped as u64)
            .terminate();
        line.emit();
    }

    (passed, failed, skipped)
}
