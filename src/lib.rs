pub mod prelude;
pub mod config;
pub mod typed_array;
pub mod random{
    pub mod split_mix_64;
    pub mod xoshiro256plusplus;
    pub mod sampler;
}
pub mod dsp{
    pub mod sinc;
    pub mod windows;
    pub mod stream_operator;
    pub mod filters{
        pub mod firwin;
        pub mod butterworth;
        pub mod root_raised_cosine;
        pub mod hilbert;
        pub mod discrete_linear_filter;
    }
}
pub mod oracles;
pub mod serialize;
pub mod fixtures;
