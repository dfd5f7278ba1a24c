//! Stream-level elements

use super::NS_STREAMS;
use crate::element::Element;

element_type! {
    /// The `<stream:stream>` root
    Stream {
        namespace: NS_STREAMS,
        local_name: "stream",
        tags: [(NS_STREAMS, "stream")],
    }
}

element_type! {
    /// `<stream:features/>` advertised after the stream header
    StreamFeatures {
        namespace: NS_STREAMS,
        local_name: "features",
        tags: [(NS_STREAMS, "features")],
    }
}

element_type! {
    /// `<stream:error/>`, fatal to the stream
    StreamError {
        namespace: NS_STREAMS,
        local_name: "error",
        tags: [(NS_STREAMS, "error")],
    }
}

impl Stream {
    pub fn version(&self) -> Option<&str> {
        self.node().attribute("version")
    }

    /// The `to` attribute, naming the receiving domain
    pub fn domain(&self) -> Option<&str> {
        self.node().attribute("to")
    }
}

impl StreamFeatures {
    /// True if a child feature with this local name is advertised
    pub fn has_feature(&self, local_name: &str) -> bool {
        self.node().child(local_name).is_some()
    }
}

impl StreamError {
    /// Local name of the first child, the defined condition
    pub fn condition(&self) -> Option<&str> {
        self.node()
            .children()
            .iter()
            .map(|c| c.local_name())
            .find(|name| *name != "text")
    }
}
