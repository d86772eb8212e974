use super::descriptor::CapabilityDescriptor;

/// Join tokens with single spaces, dropping empty ones.
pub fn join_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `-c:v <codec> <parameters>` for the descriptor. Without an encoder name the
/// flag is dropped and only the parameters remain (`None` yields `-vn`).
pub fn codec_fragment(descriptor: &CapabilityDescriptor) -> String {
    let command = descriptor.command;
    if command.codec.trim().is_empty() {
        return join_tokens([command.parameters]);
    }
    join_tokens(["-c:v", command.codec, command.parameters])
}

/// Codec fragment followed by the encode-speed command and pixel format.
///
/// An unknown encode-speed name contributes nothing; `auto` and blank pixel
/// formats leave the choice to ffmpeg.
pub fn video_args(
    descriptor: &CapabilityDescriptor,
    encode_speed: &str,
    pixel_format: &str,
) -> String {
    let codec = codec_fragment(descriptor);
    let speed = descriptor
        .encode_speed_preset(encode_speed)
        .map(|preset| preset.command)
        .unwrap_or_default();
    let pix_fmt = match pixel_format.trim() {
        "" | "auto" => String::new(),
        fmt => format!("-pix_fmt {}", fmt),
    };
    join_tokens([codec.as_str(), speed, pix_fmt.as_str()])
}
