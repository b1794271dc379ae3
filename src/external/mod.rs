pub mod naver_maps;
