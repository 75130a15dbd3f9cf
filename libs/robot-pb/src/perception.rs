//! Tracking and segmentation frames (`proto/perception/imgs.proto`).

use crate::codec::Payload;

/// One mask pixel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Masks {
    #[prost(int32, tag = "1")]
    pub x: i32,
    #[prost(int32, tag = "2")]
    pub y: i32,
}

/// A tracked object: corner coordinates, tracker id, class and mask.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrackRow {
    #[prost(float, tag = "1")]
    pub x1: f32,
    #[prost(float, tag = "2")]
    pub y1: f32,
    #[prost(float, tag = "3")]
    pub x2: f32,
    #[prost(float, tag = "4")]
    pub y2: f32,
    #[prost(string, tag = "5")]
    pub track_id: ::prost::alloc::string::String,
    #[prost(float, tag = "6")]
    pub conf: f32,
    #[prost(string, tag = "7")]
    pub cls: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "8")]
    pub mask: ::prost::alloc::vec::Vec<Masks>,
}

impl TrackRow {
    pub fn add_mask(&mut self, x: i32, y: i32) {
        self.mask.push(Masks { x, y });
    }
}

/// An encoded camera image submitted for processing.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Img {
    #[prost(string, tag = "1")]
    pub timestamp: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub img: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "3")]
    pub requires_masks: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MasksTracks {
    #[prost(string, tag = "1")]
    pub timestamp: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub tracks: ::prost::alloc::vec::Vec<TrackRow>,
}

impl MasksTracks {
    pub fn track(&self, track_id: &str) -> Option<&TrackRow> {
        self.tracks.iter().find(|t| t.track_id == track_id)
    }
}

impl Payload for Masks {}
impl Payload for TrackRow {}
impl Payload for Img {}
impl Payload for MasksTracks {}
