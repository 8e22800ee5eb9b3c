//! Canonical quality names recognized in release titles.

/// Canonical quality of a release.
///
/// The variants cover the resolutions, sources, and codecs the default
/// vocabulary knows about. Order here is not significant; ranking between
/// qualities comes from the vocabulary's priority list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    /// No recognized quality token was present.
    #[default]
    Unknown,
    /// 1080p Full HD
    _1080p,
    /// Web download (lossless from streaming service)
    WebDl,
    /// 720p HD
    _720p,
    /// Blu-ray disc rip
    BluRay,
    /// HDTV broadcast capture
    Hdtv,
    /// DVD disc image
    Dvdr,
    /// Pure digital source TV
    Pdtv,
    /// x264 encode
    X264,
    /// H.264 encode
    H264,
    /// XviD encode
    Xvid,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::Unknown => write!(f, "unknown"),
            Quality::_1080p => write!(f, "1080p"),
            Quality::WebDl => write!(f, "web-dl"),
            Quality::_720p => write!(f, "720p"),
            Quality::BluRay => write!(f, "bluray"),
            Quality::Hdtv => write!(f, "hdtv"),
            Quality::Dvdr => write!(f, "dvdr"),
            Quality::Pdtv => write!(f, "pdtv"),
            Quality::X264 => write!(f, "x264"),
            Quality::H264 => write!(f, "h.264"),
            Quality::Xvid => write!(f, "xvid"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = crate::model::RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Quality::Unknown),
            "1080p" => Ok(Quality::_1080p),
            "web-dl" | "webdl" => Ok(Quality::WebDl),
            "720p" => Ok(Quality::_720p),
            "bluray" | "blu-ray" => Ok(Quality::BluRay),
            "hdtv" => Ok(Quality::Hdtv),
            "dvdr" => Ok(Quality::Dvdr),
            "pdtv" => Ok(Quality::Pdtv),
            "x264" => Ok(Quality::X264),
            "h.264" | "h264" => Ok(Quality::H264),
            "xvid" => Ok(Quality::Xvid),
            _ => Err(crate::model::RequestError::InvalidArgument(
                "unrecognized quality name",
            )),
        }
    }
}
