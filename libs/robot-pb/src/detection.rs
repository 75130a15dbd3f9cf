//! Object detection output (`proto/detection/detection.proto`).

use crate::codec::Payload;
use crate::common::Timestamp;

/// Axis-aligned box, top-left corner plus size, in pixels.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BoundingBox {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub width: f32,
    #[prost(float, tag = "4")]
    pub height: f32,
}

impl BoundingBox {
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Intersection over union; 0 when either box is empty.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        let intersection = (right - left).max(0.0) * (bottom - top).max(0.0);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 { 0.0 } else { intersection / union }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DetectionResult {
    #[prost(string, tag = "1")]
    pub object_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub class_name: ::prost::alloc::string::String,
    /// 0.0..=1.0
    #[prost(float, tag = "3")]
    pub confidence: f32,
    #[prost(message, optional, tag = "4")]
    pub bbox: ::core::option::Option<BoundingBox>,
}

/// All detections for one camera frame.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DetectionFrame {
    #[prost(message, optional, tag = "1")]
    pub timestamp: ::core::option::Option<Timestamp>,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<DetectionResult>,
}

impl DetectionFrame {
    /// Results at or above `threshold`, in frame order.
    pub fn confident(&self, threshold: f32) -> impl Iterator<Item = &DetectionResult> {
        self.results.iter().filter(move |r| r.confidence >= threshold)
    }
}

impl Payload for BoundingBox {}
impl Payload for DetectionResult {}
impl Payload for DetectionFrame {}
