mod editing;
mod recording_and_playback;
mod rotation_and_io;
