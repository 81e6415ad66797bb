// End-to-end coverage of the render pipeline against on-disk fixtures, with a
// recording compositor standing in for ImageMagick. The surveyed-mode cases
// use real json records so the gating path runs exactly as it does in
// production.
