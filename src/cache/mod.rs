//! 对象缓存层
//!
//! 认证中间件用它缓存 token → 用户的映射，减少每次请求的数据库往返。
//! 后端通过插件注册表选择（moka 内存缓存 / redis），redis 不可用时回退 moka。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端暂时不可用等情况，调用方按未命中处理但不回写
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明并自注册一个缓存后端插件
///
/// 展开为一个 `ctor` 构造函数，在进程启动时把 `$cache_type::new()`
/// 包装成异步构造器注册进全局插件表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        ::paste::paste! {
            #[::ctor::ctor]
            fn [<__register_object_cache_ $cache_type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            <$cache_type>::new()
                                .map(|cache| {
                                    ::std::boxed::Box::new(cache)
                                        as ::std::boxed::Box<dyn $crate::cache::ObjectCache>
                                })
                                .map_err($crate::errors::TinyLearnError::cache_connection)
                        })
                    }),
                );
            }
        }
    };
}
