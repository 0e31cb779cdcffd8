pub mod uniform_size_sampler;
