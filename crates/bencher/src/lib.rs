//! Response fixtures for the decoder benchmarks.

/// A named benchmark input.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, file: TestFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }
}

/// A raw http response stored under `resources/response`.
///
/// Fixtures are stored with LF line endings; [`TestFile::wire_content`]
/// returns the CRLF form a server sends.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// The fixture with every line ending converted to CRLF.
    pub fn wire_content(&self) -> String {
        self.content.replace("\r\n", "\n").replace('\n', "\r\n")
    }
}
