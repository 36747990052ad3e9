mod generate_biomes;
mod generate_features;
