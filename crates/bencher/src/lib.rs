use std::io::Cursor;

/// A request shape to benchmark the adaptor with.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    headers: &'static [(&'static str, &'static str)],
    body: &'static [u8],
}

impl TestCase {
    pub const fn new(
        name: &'static str,
        group: TestGroup,
        headers: &'static [(&'static str, &'static str)],
        body: &'static [u8],
    ) -> Self {
        Self { name, group, headers, body }
    }

    pub const fn small(name: &'static str, headers: &'static [(&'static str, &'static str)], body: &'static [u8]) -> Self {
        Self::new(name, TestGroup::Small, headers, body)
    }

    pub const fn normal(name: &'static str, headers: &'static [(&'static str, &'static str)], body: &'static [u8]) -> Self {
        Self::new(name, TestGroup::Normal, headers, body)
    }

    pub const fn large(name: &'static str, headers: &'static [(&'static str, &'static str)], body: &'static [u8]) -> Self {
        Self::new(name, TestGroup::Large, headers, body)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        self.headers
    }

    pub fn body(&self) -> &'static [u8] {
        self.body
    }

    /// Builds a fresh external request for this case.
    ///
    /// # Panics
    ///
    /// Panics if a header of the case is not a valid header.
    pub fn external_request(&self) -> http::Request<Option<Cursor<&'static [u8]>>> {
        let mut builder = http::Request::post("/upload");
        for (name, value) in self.headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Some(Cursor::new(self.body))).expect("test case should be a valid request")
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
