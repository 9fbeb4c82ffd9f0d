pub mod episode_reqs;
