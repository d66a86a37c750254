//! Well-known dotted paths into iTunes-style movie metadata.
//!
//! All of these reach through `meta` and `ilst`, which are not in the classic
//! QuickTime container table; resolve them against a tree built with
//! [`ContainerTable::with_itunes_metadata`](crate::containers::ContainerTable::with_itunes_metadata).
//! The `©` in the audio tags maps to the raw `0xa9` prefix byte.

pub const METADATA: &str = "moov.udta.meta";
pub const ITEM_LIST: &str = "moov.udta.meta.ilst";

pub const ALBUM_ARTIST: &str = "moov.udta.meta.ilst.aART";
pub const COVER_ART: &str = "moov.udta.meta.ilst.covr";
pub const COMPILATION: &str = "moov.udta.meta.ilst.cpil";
pub const VIDEO_DESCRIPTION: &str = "moov.udta.meta.ilst.desc";
pub const DISK: &str = "moov.udta.meta.ilst.disk";
pub const GENRE: &str = "moov.udta.meta.ilst.gnre";
pub const GAPLESS: &str = "moov.udta.meta.ilst.pgap";
pub const SORT_ALBUM_ARTIST: &str = "moov.udta.meta.ilst.soaa";
pub const SORT_ALBUM: &str = "moov.udta.meta.ilst.soal";
pub const SORT_ARTIST: &str = "moov.udta.meta.ilst.soar";
pub const SORT_COMPOSER: &str = "moov.udta.meta.ilst.soco";
pub const SORT_NAME: &str = "moov.udta.meta.ilst.sonm";
pub const SORT_VIDEO_SHOW: &str = "moov.udta.meta.ilst.sosn";
pub const BPM: &str = "moov.udta.meta.ilst.tmpo";
pub const TRACK: &str = "moov.udta.meta.ilst.trkn";
pub const VIDEO_EPISODE_ID: &str = "moov.udta.meta.ilst.tven";
pub const VIDEO_EPISODE: &str = "moov.udta.meta.ilst.tves";
pub const VIDEO_SHOW: &str = "moov.udta.meta.ilst.tvsh";
pub const VIDEO_SEASON: &str = "moov.udta.meta.ilst.tvsn";

pub const AUDIO_ARTIST: &str = "moov.udta.meta.ilst.©ART";
pub const AUDIO_ALBUM: &str = "moov.udta.meta.ilst.©alb";
pub const AUDIO_COMMENT: &str = "moov.udta.meta.ilst.©cmt";
pub const AUDIO_YEAR: &str = "moov.udta.meta.ilst.©day";
pub const AUDIO_GENRE: &str = "moov.udta.meta.ilst.©gen";
pub const AUDIO_GROUPING: &str = "moov.udta.meta.ilst.©grp";
pub const AUDIO_LYRICS: &str = "moov.udta.meta.ilst.©lyr";
pub const AUDIO_NAME: &str = "moov.udta.meta.ilst.©nam";
pub const AUDIO_ENCODER: &str = "moov.udta.meta.ilst.©too";
pub const AUDIO_COMPOSER: &str = "moov.udta.meta.ilst.©wrt";
