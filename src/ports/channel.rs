/// Output channel port - a host-provided text stream that log lines are
/// written to.
///
/// `show` and `dispose` are optional on the host side, so both default to
/// doing nothing.
pub trait OutputChannel: Send + Sync {
    /// Append one line of text to the channel.
    fn append_line(&self, value: &str);

    /// Reveal the channel to the user.
    fn show(&self, _preserve_focus: Option<bool>) {}

    /// Release the channel. Called once, when the logger lets go of it; no
    /// line is appended afterwards.
    fn dispose(&self) {}
}

/// Channel provider port - a name plus a factory for output channels.
pub trait ChannelProvider: Send + Sync {
    /// Name used for the channel and as the console mirror prefix.
    fn name(&self) -> &str;

    /// Create a new output channel called `name`.
    fn create_channel(&self, name: &str) -> Box<dyn OutputChannel>;
}
