use serde::Deserialize;

pub const COMPILE_TESTS_FILE: &str = "tests/compile_tests.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct TestCompile {
    pub schema: String,
    pub table: Option<String>,
    pub ddl: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TestCompileData {
    pub tests: Vec<TestCompile>,
}
